//! Start-up banner.

const BANNER: &str = r"
   _____                          _    _                _
  |  __ \                        | |  | |              | |
  | |__) |_ _ _ __ __ _ _ __ ___ | |__| | __ ___      _| | __
  |  ___/ _` | '__/ _` | '_ ` _ \|  __  |/ _` \ \ /\ / / |/ /
  | |  | (_| | | | (_| | | | | | | |  | | (_| |\ V  V /|   <
  |_|   \__,_|_|  \__,_|_| |_| |_|_|  |_|\__,_| \_/\_/ |_|\_\
";

/// Banner text followed by a short flag reference.
pub fn banner_text() -> String {
    format!(
        "{BANNER}\n  ParamHawk v{}: archived URL collection and parameter discovery\n\n\
         -d      Target domain\n\
         -c      Collect all URLs from the target using the archive tool\n\
         -p      Generate param URLs\n\
         -l      Read target domains from stdin\n\
         -o      Directory for the artifacts\n\
         -s      Do not print this banner\n",
        env!("CARGO_PKG_VERSION")
    )
}

pub fn print_banner() {
    println!("{}", banner_text());
}
