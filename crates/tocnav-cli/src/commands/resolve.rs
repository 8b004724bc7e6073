use anyhow::Result;

use tocnav_core::{LinkIntent, LinkResolver, NavigatorConfig};

pub fn run(config: &NavigatorConfig, link: &str) -> Result<()> {
    println!("{}", describe(&LinkResolver::new(config.links.clone()), link));
    Ok(())
}

fn describe(resolver: &LinkResolver, link: &str) -> String {
    match resolver.classify(link) {
        Some(LinkIntent::ScrollToSection(id)) => format!("scroll-to-section {}", id),
        Some(LinkIntent::NavigateToPage(page)) => format!("navigate-to-page {}", page),
        Some(LinkIntent::ClipboardAction) => "clipboard-action".to_string(),
        None => "no-op".to_string(),
    }
}
