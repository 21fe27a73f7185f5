/// Trading sessions per year used to annualise daily figures.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// What a close series says about a sector, before country weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesMetrics {
    /// Simple return of the last close over the previous one, in percent.
    pub performance: f64,
    /// Annualised population standard deviation of daily returns, in percent.
    pub volatility: f64,
    /// Annualised mean daily return over its standard deviation; 0 for a flat series.
    pub sharpe_ratio: f64,
}

/// Derives performance, volatility and Sharpe from a chronologically ordered close series.
///
/// Returns `None` when there are fewer than two closes or when a close is not a
/// strictly positive finite price, in which case callers use static figures.
pub fn analyze_closes(closes: &[f64]) -> Option<SeriesMetrics> {
    if closes.len() < 2 || closes.iter().any(|c| !c.is_finite() || *c <= 0.0) {
        return None;
    }

    let current = closes[closes.len() - 1];
    let previous = closes[closes.len() - 2];
    let performance = (current - previous) / previous * 100.0;

    let returns: Vec<f64> = closes.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect();
    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    let annualiser = TRADING_DAYS_PER_YEAR.sqrt();
    let sharpe_ratio = if std_dev > 0.0 {
        mean / std_dev * annualiser
    } else {
        0.0
    };

    Some(SeriesMetrics {
        performance,
        volatility: std_dev * annualiser * 100.0,
        sharpe_ratio,
    })
}
