//! Supported currencies.
//!
//! The table is fixed at build time. Its order is the order in which rates
//! are supplied to `define_rates` and returned by `rates`.

use soroban_sdk::{symbol_short, Env, Symbol, Vec};

/// A supported currency and the number of fractional digits of its
/// smallest unit.
pub struct Currency {
    pub code: Symbol,
    pub decimals: u32,
}

pub const CURRENCY_TABLE: [Currency; 10] = [
    Currency {
        code: symbol_short!("BTC"),
        decimals: 9,
    },
    Currency {
        code: symbol_short!("EOS"),
        decimals: 4,
    },
    Currency {
        code: symbol_short!("GBP"),
        decimals: 2,
    },
    Currency {
        code: symbol_short!("USD"),
        decimals: 2,
    },
    Currency {
        code: symbol_short!("CHF"),
        decimals: 2,
    },
    Currency {
        code: symbol_short!("EUR"),
        decimals: 2,
    },
    Currency {
        code: symbol_short!("CNY"),
        decimals: 2,
    },
    Currency {
        code: symbol_short!("JPY"),
        decimals: 2,
    },
    Currency {
        code: symbol_short!("CAD"),
        decimals: 2,
    },
    Currency {
        code: symbol_short!("AUD"),
        decimals: 2,
    },
];

pub(crate) fn len() -> u32 {
    CURRENCY_TABLE.len() as u32
}

/// Position of `code` in the table.
pub(crate) fn index_of(code: &Symbol) -> Option<u32> {
    CURRENCY_TABLE
        .iter()
        .position(|c| c.code == *code)
        .map(|i| i as u32)
}

pub(crate) fn code_at(index: u32) -> Symbol {
    CURRENCY_TABLE[index as usize].code.clone()
}

pub(crate) fn codes(env: &Env) -> Vec<Symbol> {
    let mut codes = Vec::new(env);
    for currency in CURRENCY_TABLE.iter() {
        codes.push_back(currency.code.clone());
    }
    codes
}

pub(crate) fn decimals(env: &Env) -> Vec<u32> {
    let mut decimals = Vec::new(env);
    for currency in CURRENCY_TABLE.iter() {
        decimals.push_back(currency.decimals);
    }
    decimals
}
