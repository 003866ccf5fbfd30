#![allow(clippy::uninlined_format_args)]

use phish_scan::{analyze_text, analyze_url, ScoreResult, UrlFeatures};

fn show(label: &str, input: &str, result: &ScoreResult) {
    println!("{} {:?}", label, input);
    println!(
        "  -> {} score={} confidence={} [{}]",
        result.classification(),
        result.score,
        result.confidence,
        result.algorithm
    );
    for reason in &result.reasons {
        println!("     - {}", reason);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Scoring built-in sample inputs...");
    println!();

    let urls = [
        "https://example.com",
        "http://user@example.com",
        "not a url",
        "https://www.paypal.com/signin",
        "http://secure-login-verify-account.com",
        "http://198.51.100.23/paypal/login-verify_account@update.tk",
        "https://bit.ly/3xYz9",
    ];

    for url in urls {
        let result = analyze_url(url);
        show("URL", url, &result);
        println!(
            "     features: {}",
            serde_json::to_string(&UrlFeatures::extract(url))?
        );
    }

    println!();

    let texts = [
        "hi",
        "Hi Sam, lunch on Thursday still works for me. See you then.",
        "Dear Customer, your account has been suspended due to unusual activity. \
         Click here to verify your password within 24 hours.",
        "CONGRATULATIONS!!! YOU ARE OUR WINNER. CLAIM YOUR $1000 PRIZE NOW",
    ];

    for text in texts {
        let result = analyze_text(text);
        show("TEXT", text, &result);
    }

    Ok(())
}
