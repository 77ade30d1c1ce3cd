use colored::Colorize;

const LOGO: &str = r"   ____       __   _ __  _____ ___    __
  / __ \_____/ /_ (_) /_/ ___// (_)__/ /__
 / / / / ___/ __ \/ / __/\__ \/ / / __  / _ \
/ /_/ / /  / /_/ / / /_ ___/ / / / /_/ /  __/
\____/_/  /_.___/_/\__//____/_/_/\__,_/\___/";

pub fn print_banner() {
    println!("{}", LOGO.cyan().bold());
}

pub fn print_banner_with_version() {
    print_banner();
    println!();
    println!(
        "  {} {}",
        "orbitslide".bold(),
        env!("CARGO_PKG_VERSION").green()
    );
    println!("  {}", env!("CARGO_PKG_DESCRIPTION").dimmed());
}
