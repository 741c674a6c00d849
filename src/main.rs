use std::env;
use std::process;

use quaternion::config::Config;
use quaternion::QuatResult;

fn main() {
    env_logger::init();

    let cfg = match Config::new(env::args().skip(1).collect()) {
        Ok(cfg) => cfg,
        Err(err) => {
            log::error!("{err}");
            process::exit(1);
        }
    };
    log::info!("{cfg}");

    if let Err(err) = run(&cfg) {
        log::error!("{err}");
        process::exit(1);
    }
}

fn run(cfg: &Config) -> QuatResult<()> {
    let (u, v) = (cfg.u, cfg.v);

    println!("{u}");
    println!("{v}");
    println!("{}", u + v);
    println!("{}", u - v);
    println!("{}", u * v);
    println!("{}", v * u);
    println!("{}", u.divide(v)?);
    println!("{}", u.magnitude());
    Ok(())
}
