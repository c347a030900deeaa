// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use umrah_booking_client::{
    BookingPlan, HttpBookingClient, PdfReceiptRenderer, PlanOutcome, execute_plan,
};
use umrah_booking_domain::{Currency, Locale, SiteContext};

/// Umrah Book - books a collective Umrah package from a JSON plan
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Root URL of the booking server
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Path to the JSON booking plan
    #[arg(long)]
    plan: PathBuf,

    /// Where to write the PDF receipt. Defaults to `receipt-<id>.pdf`.
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Receipt and message language (en, fr, ar)
    #[arg(long, default_value = "en")]
    locale: Locale,

    /// Display currency for prices (MAD, EUR, USD, SAR)
    #[arg(long, default_value = "MAD")]
    currency: Currency,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let plan_text: String = std::fs::read_to_string(&args.plan)?;
    let plan: BookingPlan = serde_json::from_str(&plan_text)?;
    let client: HttpBookingClient = HttpBookingClient::new(&args.base_url)?;
    let context: SiteContext = SiteContext::new(args.locale, args.currency);

    info!(
        slug = %plan.package_slug,
        server = %client.base_url(),
        "Booking from plan"
    );

    let outcome: PlanOutcome =
        execute_plan(&plan, &client, &client, &PdfReceiptRenderer, &context).await?;

    match outcome.receipt {
        Ok(receipt) => {
            let path: PathBuf = args
                .out
                .unwrap_or_else(|| PathBuf::from(&receipt.file_name));
            std::fs::write(&path, &receipt.bytes)?;
            info!(path = %path.display(), "Receipt written");
        }
        Err(err) => warn!(error = %err, "Booking confirmed without a receipt"),
    }

    println!("{}", outcome.booking_id);
    Ok(())
}
