fn main() {
    if let Err(err) = repolink::cli::run() {
        repolink::ui::output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
