//! Pearson correlation and ordinary least squares on paired samples.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{StudyError, StudyResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub r_value: f64,
    pub p_value: f64,
    pub slope_stderr: f64,
    pub intercept_stderr: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn r_squared(&self) -> f64 {
        self.r_value * self.r_value
    }
}

struct Moments {
    n: usize,
    x_mean: f64,
    ssxm: f64,
    ssym: f64,
    ssxym: f64,
}

fn moments(x: &[f64], y: &[f64]) -> StudyResult<Moments> {
    if x.len() != y.len() {
        return Err(StudyError::insufficient(
            "paired samples (length mismatch)",
            x.len().max(y.len()),
            x.len().min(y.len()),
        ));
    }
    let n = x.len();
    if n < 2 {
        return Err(StudyError::insufficient("correlation", 2, n));
    }
    let nf = n as f64;
    let x_mean = x.iter().sum::<f64>() / nf;
    let y_mean = y.iter().sum::<f64>() / nf;
    let mut ssxm = 0.0;
    let mut ssym = 0.0;
    let mut ssxym = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - x_mean;
        let dy = b - y_mean;
        ssxm += dx * dx;
        ssym += dy * dy;
        ssxym += dx * dy;
    }
    // Population moments.
    Ok(Moments {
        n,
        x_mean,
        ssxm: ssxm / nf,
        ssym: ssym / nf,
        ssxym: ssxym / nf,
    })
}

fn correlation(m: &Moments) -> StudyResult<f64> {
    if m.ssxm == 0.0 {
        return Err(StudyError::insufficient("correlation (distinct x values)", 2, 1));
    }
    if m.ssym == 0.0 {
        return Err(StudyError::insufficient("correlation (distinct y values)", 2, 1));
    }
    Ok((m.ssxym / (m.ssxm * m.ssym).sqrt()).clamp(-1.0, 1.0))
}

/// Pearson product-moment correlation coefficient.
pub fn pearson(x: &[f64], y: &[f64]) -> StudyResult<f64> {
    correlation(&moments(x, y)?)
}

/// Least-squares line of `y` on `x` with a two-sided t-test on the slope.
pub fn linregress(x: &[f64], y: &[f64]) -> StudyResult<LinearFit> {
    let m = moments(x, y)?;
    let r = correlation(&m)?;
    let slope = m.ssxym / m.ssxm;
    let intercept = y.iter().sum::<f64>() / m.n as f64 - slope * m.x_mean;

    let (p_value, slope_stderr, intercept_stderr) = if m.n == 2 {
        let p = if y[0] == y[1] { 1.0 } else { 0.0 };
        (p, 0.0, 0.0)
    } else {
        let df = (m.n - 2) as f64;
        let one_minus_r2 = (1.0 - r * r).max(0.0);
        let p = if one_minus_r2 == 0.0 {
            0.0
        } else {
            let t = r * (df / one_minus_r2).sqrt();
            let dist = StudentsT::new(0.0, 1.0, df)
                .map_err(|_| StudyError::insufficient("t distribution degrees of freedom", 1, 0))?;
            2.0 * (1.0 - dist.cdf(t.abs()))
        };
        let slope_stderr = (one_minus_r2 * m.ssym / m.ssxm / df).sqrt();
        let intercept_stderr = slope_stderr * (m.ssxm + m.x_mean * m.x_mean).sqrt();
        (p, slope_stderr, intercept_stderr)
    };

    Ok(LinearFit {
        slope,
        intercept,
        r_value: r,
        p_value,
        slope_stderr,
        intercept_stderr,
    })
}
