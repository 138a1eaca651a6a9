
/* Macros for operator-facing output
 *
 * (c) Chris Williams, 2021.
 *
 * See LICENSE for usage and copying.
 */

/* print a message to stderr and exit immediately */
#[macro_export]
macro_rules! fatal_msg
{
    ($fmt:expr) => ({ eprintln!("{}", $fmt); std::process::exit(1); });
    ($fmt:expr, $($arg:tt)*) => ({ eprintln!($fmt, $($arg)*); std::process::exit(1); });
}

/* print a status line to stdout: progress percentages, worker hints,
   and dry-run substitution expressions all go through here */
#[macro_export]
macro_rules! report_msg
{
    ($fmt:expr) => ({ println!("{}", $fmt); });
    ($fmt:expr, $($arg:tt)*) => ({ println!($fmt, $($arg)*); });
}
