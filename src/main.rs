use anyhow::Context;
use std::io::Read;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {path}"))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            text
        }
    };

    let value = parsijson::parse(text.trim()).context("input is not a valid JSON document")?;
    println!("{value:#?}");

    Ok(())
}
