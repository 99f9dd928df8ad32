use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use lineperf::{
    make_power_circle, make_receiving_end, run_eval, EvalOpt, LineParametersBuilder, Model,
    PowerFactor, ReceivingEndConditionBuilder,
};
use lineperf::{math, report};

/// Steady-state transmission line performance analysis.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simplified series-impedance loss model (short line)
    Series(EvalArgs),

    /// Nominal-pi ABCD two-port model (medium line)
    Pi(EvalArgs),

    /// Receiving-end power circle geometry
    Circle(CircleArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PfType {
    Lagging,
    Unity,
    Leading,
}

#[derive(Args)]
struct EvalArgs {
    /// Receiving line-to-line voltage (kV).
    #[arg(long, default_value_t = 220.0)]
    vr: f64,

    /// Nominal sending line-to-line voltage (kV).
    #[arg(long)]
    vs: Option<f64>,

    /// Receiving active power (MW).
    #[arg(long, default_value_t = 150.0)]
    pr: f64,

    /// Load power factor type.
    #[arg(long, value_enum, default_value_t = PfType::Lagging)]
    pf_type: PfType,

    /// Load power factor magnitude, ignored for unity.
    #[arg(long, default_value_t = 0.85)]
    pf: f64,

    /// Series resistance (ohm/phase).
    #[arg(short, long, default_value_t = 10.0)]
    r: f64,

    /// Series reactance (ohm/phase).
    #[arg(short, long, default_value_t = 50.0)]
    x: f64,

    /// Shunt capacitive reactance (ohm/phase), pi model only.
    #[arg(long)]
    xc: Option<f64>,

    /// Print the result record as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args)]
struct CircleArgs {
    /// Receiving line-to-line voltage (kV).
    #[arg(long, default_value_t = 220.0)]
    vr: f64,

    /// Sending line-to-line voltage (kV).
    #[arg(long, default_value_t = 230.0)]
    vs: f64,

    /// Delivered active power (MW).
    #[arg(long, default_value_t = 150.0)]
    pr: f64,

    /// Series resistance (ohm/phase).
    #[arg(short, long, default_value_t = 10.0)]
    r: f64,

    /// Series reactance (ohm/phase).
    #[arg(short, long, default_value_t = 50.0)]
    x: f64,

    /// Print the circle record as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_default_env()
        .format_level(false)
        .format_target(false)
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    match execute(&cli) {
        Ok(_) => {
            std::process::exit(0);
        }
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(2);
        }
    }
}

fn power_factor(pf_type: PfType, pf: f64) -> PowerFactor {
    match pf_type {
        PfType::Lagging => PowerFactor::Lagging(pf),
        PfType::Unity => PowerFactor::Unity,
        PfType::Leading => PowerFactor::Leading(pf),
    }
}

fn evaluate(args: &EvalArgs, model: Model) -> Result<()> {
    let line = LineParametersBuilder::default()
        .r(args.r)
        .x(args.x)
        .xc(args.xc)
        .build()?;
    let cond = ReceivingEndConditionBuilder::default()
        .vr_kv(args.vr)
        .pr_mw(args.pr)
        .pf(power_factor(args.pf_type, args.pf))
        .build()?;

    let opt = EvalOpt {
        model,
        vs_kv: args.vs,
    };
    let eval = run_eval(&line, &cond, &opt);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&eval)?);
    } else {
        print!("{}", report::write_results(&eval));
    }
    Ok(())
}

fn circle(args: &CircleArgs) -> Result<()> {
    let line = LineParametersBuilder::default()
        .r(args.r)
        .x(args.x)
        .build()?;
    let cond = ReceivingEndConditionBuilder::default()
        .vr_kv(args.vr)
        .pr_mw(args.pr)
        .build()?;
    let re = make_receiving_end(&cond);

    let pc = make_power_circle(line.z(), re.vr_ph, math::phase_voltage(args.vs), args.pr);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&pc)?);
    } else {
        println!(
            "center: ({}, {}) MVA  radius: {} MVA",
            report::format_f64(pc.cx),
            report::format_f64(pc.cy),
            report::format_f64(pc.radius)
        );
        println!(
            "beta: {} deg  delta: {} deg",
            report::format_f64(pc.beta),
            report::format_f64(pc.delta)
        );
    }
    Ok(())
}

fn execute(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Series(args) => evaluate(args, Model::SimplifiedSeries),
        Commands::Pi(args) => evaluate(args, Model::NominalPi),
        Commands::Circle(args) => circle(args),
    }
}
