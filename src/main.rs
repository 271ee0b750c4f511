use gitplus::App;
use gitplus::Config;

fn main() -> miette::Result<()> {
    let config = Config::new()?;
    App::new(config).run()
}
