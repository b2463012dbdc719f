use std::io::{BufRead, Write};

use newsletter_signup::{
    app::SignupPage,
    configuration::get_configuration,
    render::render_page,
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr: stdout belongs to the rendered page.
    let subscriber = get_subscriber("newsletter-signup".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber);

    let config = get_configuration().expect("Failed to read configuration");
    let mut page = SignupPage::new(config.api.client());

    // Initial load, same as the page mounting in a browser.
    page.refresh().await;
    redraw(&page);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let action = line.trim();

        match action {
            "q" | "quit" => break,
            "" | "r" => page.refresh().await,
            email => {
                page.set_email_input(email.to_string());
                page.submit().await;
            }
        }

        redraw(&page);
    }

    Ok(())
}

fn redraw(page: &SignupPage) {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", render_page(page.state()))
        .and_then(|_| {
            write!(
                stdout,
                "Type an email to subscribe, 'r' to refresh, 'q' to quit.\n> "
            )
        })
        .and_then(|_| stdout.flush())
        .expect("Failed to write to stdout");
}
