use campaign_dice::{Num, Preset, RollContext, RollHistory, RollResult, Roller, Stringifier, Stringify};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Roll dice from the command line.
#[derive(Parser, Debug)]
#[command(name = "repl", version, about)]
struct Args {
    /// Seed the generator for repeatable rolls
    #[arg(long)]
    seed: Option<u64>,

    /// How many recent rolls to remember
    #[arg(long, default_value_t = Num::MIN.saturating_add(RollHistory::DEFAULT_CAPACITY - 1))]
    history: Num,

    /// Print rolls as markdown
    #[arg(long)]
    markdown: bool,

    /// Roll these and exit instead of reading stdin
    #[arg(allow_negative_numbers = true)]
    notation: Vec<String>,
}

struct Session<R> {
    ctx: RollContext<R>,
    history: RollHistory,
    out: Stringifier,
}

impl<R: Roller> Session<R> {
    fn roll(&mut self, line: &str) -> Option<RollResult> {
        let result = match line.parse::<Preset>() {
            Ok(preset) => self.ctx.eval(&preset.request()),
            Err(_) => match self.ctx.roll(line) {
                Ok(result) => result,
                Err(why) => {
                    eprintln!("Error: {}", why);
                    return None;
                }
            },
        };
        tracing::info!(formula = result.formula(), total = result.total(), "rolled");
        self.history.push(result.clone());
        Some(result)
    }

    fn print_history(&self) {
        if self.history.is_empty() {
            println!("no rolls yet");
        }
        for result in self.history.iter() {
            println!("{} = {}", result.formula(), result.total());
        }
    }
}

fn print_presets() {
    for preset in Preset::ALL {
        println!("{:<14}{}", preset.name(), preset.notation());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campaign_dice=warn,repl=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let roller = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session {
        ctx: RollContext::new(roller),
        history: RollHistory::new(args.history),
        out: Stringifier::markdown(args.markdown),
    };

    if !args.notation.is_empty() {
        for notation in &args.notation {
            if let Some(result) = session.roll(notation) {
                println!("{}", session.out.stringify(&result));
            }
        }
        return Ok(());
    }

    print!("> ");
    io::stdout().flush()?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "history" => session.print_history(),
            "presets" => print_presets(),
            line => {
                if let Some(result) = session.roll(line) {
                    println!("{}", session.out.stringify(&result));
                }
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
