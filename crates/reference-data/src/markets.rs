use core_types::EtfQuote;
use std::collections::BTreeMap;

struct EtfRow {
    symbol: &'static str,
    name: &'static str,
    price: f64,
    change: f64,
    change_percent: f64,
    volume: u64,
}

const fn etf(
    symbol: &'static str,
    name: &'static str,
    price: f64,
    change: f64,
    change_percent: f64,
    volume: u64,
) -> EtfRow {
    EtfRow { symbol, name, price, change, change_percent, volume }
}

const ETFS: [EtfRow; 6] = [
    etf("SPY", "SPDR S&P 500 ETF", 445.67, 2.34, 0.53, 45_678_900),
    etf("TLT", "iShares 20+ Year Treasury Bond ETF", 89.45, -0.67, -0.74, 12_345_600),
    etf("GLD", "SPDR Gold Shares", 178.92, 1.23, 0.69, 8_765_400),
    etf("HYG", "iShares iBoxx $ High Yield Corporate Bond ETF", 76.34, 0.12, 0.16, 5_432_100),
    etf("VTI", "Vanguard Total Stock Market ETF", 234.56, 1.89, 0.81, 23_456_700),
    etf("VEA", "Vanguard FTSE Developed Markets ETF", 45.78, -0.34, -0.74, 9_876_500),
];

/// Quote page for a symbol.
pub fn quote_url(symbol: &str) -> String {
    format!("https://finance.yahoo.com/quote/{symbol}")
}

/// The static ETF board, keyed by symbol.
pub fn etf_snapshot() -> BTreeMap<String, EtfQuote> {
    ETFS.iter()
        .map(|row| {
            let quote = EtfQuote {
                name: row.name.to_string(),
                price: row.price,
                change: row.change,
                change_percent: row.change_percent,
                volume: row.volume,
                url: quote_url(row.symbol),
                color: EtfQuote::color_for_change(row.change).to_string(),
            };
            (row.symbol.to_string(), quote)
        })
        .collect()
}

/// Volatility and credit-spread gauges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketStressSnapshot {
    pub vix: f64,
    pub vix_threshold: f64,
    pub vix_gauge_max: f64,
    pub vix_source: &'static str,
    pub hy_spread: f64,
    pub hy_threshold: f64,
    pub hy_gauge_max: f64,
    pub hy_source: &'static str,
}

pub fn market_stress_snapshot() -> MarketStressSnapshot {
    MarketStressSnapshot {
        vix: 16.52,
        vix_threshold: 20.0,
        vix_gauge_max: 50.0,
        vix_source: "CBOE",
        hy_spread: 6.92,
        hy_threshold: 10.0,
        hy_gauge_max: 20.0,
        hy_source: "fred.stlouisfed.org",
    }
}

/// Reference backtest of the strategic allocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BacktestSnapshot {
    pub total_return: f64,
    pub annualized_return: f64,
    pub volatility: f64,
    pub sharpe_ratio: f64,
    pub max_drawdown: f64,
    /// (ISO date, portfolio value rebased to 100, cumulative return in percent).
    pub history: &'static [(&'static str, f64, f64)],
}

const BACKTEST_HISTORY: [(&str, f64, f64); 8] = [
    ("2023-01-01", 100.0, 0.0),
    ("2023-03-01", 105.2, 5.2),
    ("2023-06-01", 108.7, 8.7),
    ("2023-09-01", 112.1, 12.1),
    ("2023-12-01", 115.8, 15.8),
    ("2024-03-01", 118.9, 18.9),
    ("2024-06-01", 122.3, 22.3),
    ("2024-08-01", 124.5, 24.5),
];

pub fn backtest_snapshot() -> BacktestSnapshot {
    BacktestSnapshot {
        total_return: 12.45,
        annualized_return: 8.67,
        volatility: 15.23,
        sharpe_ratio: 0.89,
        max_drawdown: -8.45,
        history: &BACKTEST_HISTORY,
    }
}
