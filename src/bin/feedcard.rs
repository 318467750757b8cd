// Builds a feed card from a JSON array of links and prints the payload.

use std::fs;
use std::io::{self, Read};

use anyhow::Context;
use robotmsg::config::AppConfig;
use robotmsg::message::{FeedCard, Payload, parse_links};
use tracing::info;

fn main() -> anyhow::Result<()> {
    robotmsg::setup_logging();

    let config = AppConfig::from_env()?;

    let raw = match &config.links_file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading links from {path}"))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading links from stdin")?;
            buf
        }
    };

    let links = parse_links(&raw)?;
    info!(count = links.len(), "Loaded feed card links");

    let card = FeedCard::builder().set_links(links).build();
    let body = if config.pretty {
        card.to_json_pretty()?
    } else {
        card.to_json()?
    };

    println!("{body}");
    Ok(())
}
