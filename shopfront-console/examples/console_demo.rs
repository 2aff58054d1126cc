// shopfront-console/examples/console_demo.rs
// Signs in against a real catalog API, prints the first page, and walks one
// create/delete cycle through the console.

use shopfront_client::ClientConfig;
use shopfront_console::{AdminConsole, DialogSurface, FieldEdit, SubmitOutcome, TracingNotifier};

struct LoggingSurface;

impl DialogSurface for LoggingSurface {
    fn show(&mut self) {
        tracing::info!("[dialog] shown");
    }

    fn hide(&mut self) {
        tracing::info!("[dialog] hidden");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ClientConfig::from_env()
        .ok_or_else(|| anyhow::anyhow!("set SHOPFRONT_API_BASE and SHOPFRONT_API_PATH"))?;

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <username> <password>", args[0]);
        return Ok(());
    }

    let mut console = AdminConsole::new(config.build_http_client(), TracingNotifier);
    console.install_surface(LoggingSurface);

    if !console.sign_in(&args[1], &args[2]).await {
        anyhow::bail!("sign-in failed");
    }

    for product in console.catalog().products() {
        tracing::info!(
            title = %product.title,
            category = %product.category,
            price = %product.price,
            "product"
        );
    }

    // Create a throwaway product through the dialog flow.
    console.open_create();
    console.edit_field(FieldEdit::Title("Demo product".into()));
    console.edit_field(FieldEdit::Category("demo".into()));
    console.edit_field(FieldEdit::Unit("piece".into()));
    console.edit_field(FieldEdit::OriginPrice("10".into()));
    console.edit_field(FieldEdit::Price("5".into()));
    console.edit_field(FieldEdit::ImageUrl("https://example.com/demo.png".into()));

    match console.submit().await {
        SubmitOutcome::Succeeded => tracing::info!("demo product created"),
        outcome => anyhow::bail!("create did not succeed: {:?}", outcome),
    }

    // And delete it again.
    let created = console
        .catalog()
        .products()
        .iter()
        .find(|p| p.title == "Demo product")
        .cloned();
    if let Some(product) = created {
        console.open_delete(&product);
        match console.submit().await {
            SubmitOutcome::Succeeded => tracing::info!("demo product deleted"),
            outcome => tracing::warn!("delete did not succeed: {:?}", outcome),
        }
    }

    Ok(())
}
