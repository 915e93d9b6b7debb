use kira_predval::ctx::Ctx;
use kira_predval::io::summary::format_summary;
use kira_predval::pipeline::Pipeline;
use kira_predval::pipeline::stage1_input::Stage1Input;
use kira_predval::pipeline::stage2_curve::Stage2Curve;
use kira_predval::pipeline::stage3_table::Stage3Table;

fn computed(sensitivity: Option<f64>, specificity: Option<f64>) -> Ctx {
    let mut ctx = Ctx::new(
        sensitivity,
        specificity,
        std::path::PathBuf::from("out"),
        false,
        false,
        "0.0.0-test",
    );
    Pipeline::new(vec![
        Box::new(Stage1Input::new()),
        Box::new(Stage2Curve::new()),
        Box::new(Stage3Table::new()),
    ])
    .run(&mut ctx)
    .unwrap();
    ctx
}

#[test]
fn summary_format() {
    let s = format_summary(&computed(Some(98.0), Some(85.0))).unwrap();
    assert!(s.contains("kira-predval v"));
    assert!(s.contains("Based on Sensitivity: 98% and Specificity: 85%"));
    assert!(s.contains("Prevalence\tPPV\tNPV\n"));
    assert!(s.contains("1%\t6.2%\t100.0%\n"));
    assert!(s.contains("50%\t86.7%\t97.7%\n"));
    assert!(s.contains("Curve: 1000 points, prevalence 0.1%..99.9%"));
    assert!(s.contains("PPV: Prevalence: 0.1%, PPV: "));
    assert!(s.contains("NPV: Prevalence: 0.1%, NPV: "));
}

#[test]
fn summary_placeholder_when_not_computable() {
    let s = format_summary(&computed(Some(98.0), None)).unwrap();
    assert!(s.contains("Based on Sensitivity: 98% and Specificity: -"));
    assert!(s.contains("No result: invalid input: specificity is missing"));
    assert!(!s.contains("Prevalence\tPPV\tNPV"));
}
