use std::fmt;

use num_complex::Complex64;

use crate::{
    error::ConfigError,
    quaternion::Quaternion,
};


/// Parsing states.
enum Parse {
    None,
    LeftOperand,
    RightOperand,
}


/// Operands used by the demo binary.
#[derive(Clone, Debug)]
pub struct Config {
    pub u: Quaternion,
    pub v: Quaternion,
}
impl Config {
    /// Create a new Config with the specified command line arguments.
    ///
    /// `-u r i j k` and `-v r i j k` replace the default operands.
    pub fn new(args: Vec<String>) -> Result<Config, ConfigError> {
        let mut parser = Parse::None;
        let mut cfg    = Config::default();
        let mut comps  = Vec::with_capacity(4);
        let mut flag   = String::new();

        for arg in args.into_iter() {
            if arg == "-u" || arg == "-v" {
                cfg.finish(&parser, &flag, &mut comps)?;
                parser = if arg == "-u" {
                    Parse::LeftOperand
                }
                else {
                    Parse::RightOperand
                };
                flag = arg;
                continue;
            }
            match parser {
                Parse::LeftOperand | Parse::RightOperand => {
                    if let Ok(comp) = arg.parse::<f64>() {
                        comps.push(comp);
                    }
                    else {
                        return Err(
                            ConfigError::InvalidComponent(arg.clone())
                        );
                    }
                }
                Parse::None => {
                    return Err(
                        ConfigError::UnknownFlag(arg.clone())
                    );
                }
            }
        }
        cfg.finish(&parser, &flag, &mut comps)?;
        log::debug!("parsed operands u = {}, v = {}", cfg.u, cfg.v);
        Ok(cfg)
    }

    fn finish(&mut self, parser: &Parse, flag: &str, comps: &mut Vec<f64>) -> Result<(), ConfigError> {
        let target = match parser {
            Parse::None => return Ok(()),
            Parse::LeftOperand => &mut self.u,
            Parse::RightOperand => &mut self.v,
        };
        match comps.as_slice() {
            [real, i, j, k] => {
                *target = Quaternion::new(*real, *i, *j, *k);
                comps.clear();
                Ok(())
            }
            _ => Err(
                ConfigError::WrongComponentCount(flag.to_string(), comps.len())
            ),
        }
    }
}
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "
            \rOperands
            \r=============================================================
            \ru: {}
            \rv: {}",
            self.u,
            self.v,
        )
    }
}
impl Default for Config {
    fn default() -> Self {
        Self {
            u: Quaternion::from(Complex64::new(1.0, 6.0)),
            v: Quaternion::from([-12.0, 4.0, 7.0, -1.0]),
        }
    }
}




#[cfg(test)]
fn args(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}

#[test]
fn default_operands() {
    let cfg = Config::new(Vec::new()).unwrap();
    assert_eq!(cfg.u, Quaternion::new(1.0, 6.0, 0.0, 0.0));
    assert_eq!(cfg.v, Quaternion::new(-12.0, 4.0, 7.0, -1.0));
}

#[test]
fn override_operands() {
    let cfg = Config::new(args("-v 0 0 1 0 -u 0 1 0 0")).unwrap();
    assert_eq!(cfg.u, Quaternion::I);
    assert_eq!(cfg.v, Quaternion::J);
}

#[test]
fn bad_arguments() {
    assert!(matches!(
        Config::new(args("-u 1 2 x 4")),
        Err(ConfigError::InvalidComponent(arg)) if arg == "x"
    ));
    assert!(matches!(
        Config::new(args("-u 1 2 3 -v 1 2 3 4")),
        Err(ConfigError::WrongComponentCount(flag, 3)) if flag == "-u"
    ));
    let err = Config::new(args("-u 1 2 3 4 5")).unwrap_err();
    assert!(matches!(&err, ConfigError::WrongComponentCount(flag, 5) if flag == "-u"));
    assert!(err.to_string().ends_with("-u expects 4 components, found 5"));
    assert!(matches!(
        Config::new(args("-w 1")),
        Err(ConfigError::UnknownFlag(_))
    ));
}
