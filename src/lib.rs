use std::env;
use std::fs;
use std::sync::OnceLock;

pub mod helpers;
pub mod routing;

pub const ANSI_ITALIC: &str = "\x1b[3m";
pub const ANSI_BOLD: &str = "\x1b[1m";
pub const ANSI_RESET: &str = "\x1b[0m";

/// Name of the environment variable that turns on [`debug!`] and
/// [`debugln!`] output in debug builds.
pub const DEBUG_ENV_VAR: &str = "CRUCIBLE_DEBUG";

/// Returns true if debug output was requested for this process.
///
/// Always false in release builds.
#[inline]
pub fn debug_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    cfg!(debug_assertions) && *ENABLED.get_or_init(|| env::var_os(DEBUG_ENV_VAR).is_some())
}

/// Like [`print!`], but only in debug builds with [`DEBUG_ENV_VAR`] set.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if $crate::debug_enabled() {
            print!($($arg)*);
        }
    };
}

/// Like [`println!`], but only in debug builds with [`DEBUG_ENV_VAR`] set.
#[macro_export]
macro_rules! debugln {
    ($($arg:tt)*) => {
        if $crate::debug_enabled() {
            println!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! solve {
    ($part:expr, $solver:ident, $input:expr) => {{
        use std::fmt::Display;
        use std::time::Instant;
        use $crate::{ANSI_BOLD, ANSI_ITALIC, ANSI_RESET};

        fn print_result<T: Display>(func: impl FnOnce(&str) -> Option<T>, input: &str) {
            let timer = Instant::now();
            let result = func(input);
            let elapsed = timer.elapsed();
            match result {
                Some(result) => {
                    println!(
                        "{} {}(elapsed: {:.2?}){}",
                        result, ANSI_ITALIC, elapsed, ANSI_RESET
                    );
                }
                None => {
                    println!("not solved.")
                }
            }
        }

        println!("🎄 {}Part {}{} 🎄", ANSI_BOLD, $part, ANSI_RESET);
        print_result($solver, $input);
    }};
}

/// Reads `src/<folder>/<day>.txt`, relative to the current directory.
pub fn read_file(folder: &str, day: u8) -> String {
    let cwd = env::current_dir().unwrap();
    let filepath = cwd.join("src").join(folder).join(format!("{:02}.txt", day));
    let f = fs::read_to_string(filepath);
    f.expect("could not open input file")
}
