use anyhow::bail;
use clap::Parser;
use poker_hands::deck::Deck;
use poker_hands::hand::{ParseOptions, Validation};
use poker_hands::ranking::rank_descriptions;

const DEMO_HANDS: [&str; 5] = [
    "AH 7C AD 10C 10S",
    "10C 10S 10D 4D 4C",
    "7S 7C 3S 3D 9H",
    "5D 6D 7D 8D 9D",
    "10H JH QH KH AH",
];

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Rank five-card poker hands, strongest first",
    long_about = None
)]
struct Args {
    /// Hands such as "AH 7C AD 10C 10S". Ranks the demo hands when omitted.
    hands: Vec<String>,
    /// Accept hands that repeat a card
    #[arg(long)]
    permissive: bool,
    /// Deal N hands from a shuffled deck instead of reading them
    #[arg(long, value_name = "N", conflicts_with = "hands")]
    deal: Option<usize>,
    /// Shuffle seed used with --deal
    #[arg(long, default_value_t = 0, requires = "deal")]
    seed: u64,
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();
}

fn dealt_hands(n: usize, seed: u64) -> anyhow::Result<Vec<String>> {
    let mut deck = Deck::standard();
    if n.saturating_mul(5) > deck.len() {
        bail!("one deck deals at most {} hands, asked for {n}", deck.len() / 5);
    }
    deck.shuffle_seeded(seed);
    Ok((0..n).filter_map(|_| deck.deal_hand()).map(|h| h.to_string()).collect())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let validation = if args.permissive { Validation::Permissive } else { Validation::Strict };
    let options = ParseOptions { validation };

    let inputs = match args.deal {
        Some(n) => dealt_hands(n, args.seed)?,
        None if args.hands.is_empty() => DEMO_HANDS.iter().map(|s| s.to_string()).collect(),
        None => args.hands,
    };
    log::info!("ranking {} hands", inputs.len());

    let ranking = rank_descriptions(&inputs, &options);
    for line in ranking.lines() {
        println!("{line}");
    }
    for (input, err) in &ranking.rejected {
        eprintln!("skipped '{input}': {err}");
    }
    if !ranking.is_complete() {
        bail!("{} of {} hands could not be parsed", ranking.rejected.len(), inputs.len());
    }
    Ok(())
}
