// Copyright 2023-2024, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/cargo-stylus/blob/main/licenses/COPYRIGHT.md

/// Formats a line and prints it through `$print` in `$color`.
macro_rules! colorln {
    ($print:ident, $color:ident, $($msg:tt)*) => {{
        let msg = format!($($msg)*);
        $print!("{}", predeploy_bindgen_util::color::Color::$color(&msg))
    }};
}

macro_rules! greyln {
    ($($msg:tt)*) => { colorln!(println, grey, $($msg)*) };
}

macro_rules! mintln {
    ($($msg:tt)*) => { colorln!(println, mint, $($msg)*) };
}

macro_rules! egreyln {
    ($($msg:tt)*) => { colorln!(eprintln, grey, $($msg)*) };
}

/// Divergences and other findings that need a human to look at them.
macro_rules! epinkln {
    ($($msg:tt)*) => { colorln!(eprintln, pink, $($msg)*) };
}

pub(crate) use {colorln, egreyln, epinkln, greyln, mintln};
