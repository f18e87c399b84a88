// src/main.rs

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    popscrape::cli::run()
}
