use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kira_predval::cli::{Cli, Commands, PointArgs, RunArgs, ValidateArgs};
use kira_predval::ctx::Ctx;
use kira_predval::io;
use kira_predval::pipeline::Pipeline;
use kira_predval::pipeline::stage1_input::Stage1Input;
use kira_predval::predictive::curve::CurveSpec;
use kira_predval::predictive::example::clinical_example;
use kira_predval::predictive::{
    NPV_FORMULA, PPV_FORMULA, TestCharacteristics, input_label, percent_label,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => handle_run(args)?,
        Commands::Point(args) => handle_point(args)?,
        Commands::Validate(args) => handle_validate(args)?,
        Commands::Example => handle_example()?,
    }

    Ok(())
}

fn handle_run(args: RunArgs) -> Result<()> {
    let mut ctx = Ctx::new(
        Some(args.test.sensitivity),
        Some(args.test.specificity),
        args.out,
        args.json,
        args.tsv,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.curve_spec = CurveSpec {
        samples: args.samples,
        prevalence_min: args.prevalence_min,
        prevalence_max: args.prevalence_max,
    };
    if let Some(points) = args.points {
        ctx.table_points = points;
    }

    Pipeline::standard().run(&mut ctx)?;

    let summary = io::summary::format_summary(&ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn handle_point(args: PointArgs) -> Result<()> {
    let characteristics = TestCharacteristics::new(args.test.sensitivity, args.test.specificity)?;
    let result = characteristics.evaluate(args.prevalence)?;
    println!("prevalence: {}", input_label(args.prevalence));
    println!("PPV: {}", percent_label(result.ppv));
    println!("NPV: {}", percent_label(result.npv));
    Ok(())
}

fn handle_validate(args: ValidateArgs) -> Result<()> {
    let mut ctx = Ctx::new(
        Some(args.test.sensitivity),
        Some(args.test.specificity),
        std::path::PathBuf::from("."),
        false,
        false,
        env!("CARGO_PKG_VERSION"),
    );
    Pipeline::new(vec![Box::new(Stage1Input::new())]).run(&mut ctx)?;
    if let Some(reason) = &ctx.not_computable {
        anyhow::bail!("{}", reason);
    }
    println!("kira-predval validate ok");
    println!("sensitivity: {}", input_label(args.test.sensitivity));
    println!("specificity: {}", input_label(args.test.specificity));
    Ok(())
}

fn handle_example() -> Result<()> {
    let example = clinical_example()?;
    for line in example.lines() {
        println!("{}", line);
    }
    println!();
    println!("{}", PPV_FORMULA);
    println!("{}", NPV_FORMULA);
    Ok(())
}
