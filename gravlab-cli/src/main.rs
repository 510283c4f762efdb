use clap::{Parser, Subcommand};
use gravlab_core::{
    check_state, run_ticks, status_text, total_energy, total_momentum, ActionSet, Params,
    SimulationState,
};

mod view_app;

#[derive(Parser)]
#[command(name = "gravlab")]
#[command(about = "Interactive gravitational N-body sandbox", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive window (default)
    View,
    /// Run the reference configuration without a window and print its status
    Run {
        /// Number of ticks to simulate
        #[arg(long, default_value_t = 1000)]
        ticks: usize,
        /// Print the status every this many ticks (0 prints only the final state)
        #[arg(long, default_value_t = 0)]
        every: usize,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::View) {
        Commands::View => view_app::run(),
        Commands::Run { ticks, every } => run_headless(ticks, every),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_headless(ticks: usize, every: usize) -> Result<(), Box<dyn std::error::Error>> {
    let params = Params::default();
    let mut state = SimulationState::reference();
    let input = ActionSet::new();
    let baseline = total_energy(&state, &params);

    log::info!("running {} bodies for {} ticks", state.len(), ticks);

    let chunk = if every == 0 { ticks } else { every };
    let mut done = 0;
    while done < ticks {
        let n = chunk.min(ticks - done);
        run_ticks(&mut state, &input, &params, n);
        done += n;
        if every != 0 || done == ticks {
            print_report(&state, &params, baseline);
        }
    }
    if ticks == 0 {
        print_report(&state, &params, baseline);
    }

    let diagnostics = check_state(&state, &params);
    for d in &diagnostics {
        if d.is_error() {
            log::error!("{}", d);
        } else {
            log::warn!("{}", d);
        }
    }
    if diagnostics.iter().any(|d| d.is_error()) {
        return Err(format!("simulation became invalid after {} ticks", state.ticks).into());
    }

    Ok(())
}

fn print_report(state: &SimulationState, params: &Params, baseline: f64) {
    let energy = total_energy(state, params);
    let momentum = total_momentum(state);
    println!("--- tick {} ---", state.ticks);
    println!("{}", status_text(state));
    println!(
        "Energy: {:.4} (drift {:+.4})  Momentum: ({:.4}, {:.4})",
        energy,
        energy - baseline,
        momentum.x,
        momentum.y
    );
}
