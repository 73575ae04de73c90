//! escp-demo: prints a test page showing every text style
//!
//! ```text
//! PRINTER_HOST=192.168.1.100 escp-demo
//! escp-demo 192.168.1.100
//! ```

mod config;

use config::Config;
use escp_printer::{
    Alignment, CharacterSize, MissingCharacter, PageBuilder, PageSettings, PrintResult,
    PrinterSession, TcpTransport,
};

fn demo_page() -> PrintResult<PageBuilder> {
    let mut page = PageBuilder::new();
    page.set_missing_policy(MissingCharacter::Replace);

    page.line_feed_dots(0)?
        .text("Normal text ")?
        .bold(true)
        .text("Bold text ")?
        .bold(false)
        .italic(true)
        .text("Italic text ")?
        .bold(true)
        .text("Bold and italic text ")?
        .bold(false)
        .italic(false)
        .double_strike(true)
        .text("Striked text")?
        .double_strike(false)
        .empty_line()
        .auto_stretch()
        .text("Stretched text")?
        .empty_line()
        .character_size(CharacterSize::LARGE)
        .text("Big text!")?
        .character_size(CharacterSize::MEDIUM)
        .empty_line()
        .underline(2)?
        .text("Underline text yeah")?
        .underline(0)?
        .empty_line()
        .text("Characters: öhm äh u are β and man ☑ ¿¿ ╬ invālid")?
        .empty_line()
        .alignment(Some(Alignment::Right))
        .text("Right text :D")?
        .alignment(None)
        .empty_line()
        .line("-=")?;

    Ok(page)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "escp_demo=info,escp_printer=info".into()),
        )
        .init();

    let config = Config::from_env(std::env::args().nth(1))?;
    let page = demo_page()?;

    let mut printer = PrinterSession::<TcpTransport>::connect_with(
        &config.host,
        config.port,
        &config.connect_options(),
    )
    .await?;
    tracing::info!(peer = printer.peer(), "Connected to printer");

    let settings = PageSettings::new().with_orientation(config.orientation());
    printer.set_page_settings(&settings).await?;

    printer.print(&page, true).await?;
    tracing::info!("Finished printing");

    printer.disconnect().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_page_builds() {
        let page = demo_page().unwrap();
        let data = page.materialize();

        assert_eq!(&data[..3], &[0x1B, 0x33, 0x00]);
        assert!(data.ends_with(&"-=".repeat(24).into_bytes()));
        // "ā" is not in the Brother table and gets the shade block
        assert!(data.contains(&0xB0));
    }
}
