use screener_check::{CompareBuilder, ScreenerClient, presets};
use url::Url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let (Some(ticker), Some(list)) = (args.next(), args.next()) else {
        eprintln!("usage: presets <TICKER> <PRESETS_URL> [DESCRIPTIONS_URL]");
        return Ok(());
    };

    let client = ScreenerClient::new()?;
    let presets = presets::load_presets(&client, &Url::parse(&list)?).await?;
    let descriptions = match args.next() {
        Some(u) => Some(presets::load_descriptions(&client, &Url::parse(&u)?).await?),
        None => None,
    };

    for preset in presets {
        let mut builder = CompareBuilder::new(&client, &ticker, &preset.url);
        if let Some(d) = &descriptions {
            builder = builder.descriptions(d.clone());
        }
        match builder.run().await {
            Ok(outcome) => {
                let ok = outcome.rows.iter().filter(|r| r.verdict == screener_check::Verdict::Ok).count();
                println!("{:<30} {ok}/{} OK", preset.name, outcome.rows.len());
            }
            Err(e) => println!("{:<30} error: {e}", preset.name),
        }
    }
    Ok(())
}
