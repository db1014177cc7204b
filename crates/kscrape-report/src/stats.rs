use std::collections::HashMap;
use std::fmt;

use crate::dataset::{Book, Dataset};

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_count: usize,
    pub mean_price: Option<f64>,
    pub mean_sales_index: Option<f64>,
    pub top_publisher: Option<(String, usize)>,
    pub top_seller: Option<(String, f64)>,
}

impl Summary {
    #[must_use]
    pub fn from_dataset(data: &Dataset) -> Self {
        let top_publisher = count_by(data.books.iter().map(|b| b.publisher.as_str()))
            .into_iter()
            .next();
        let top_seller = top_n_by_sales(&data.books, 1)
            .first()
            .map(|b| (b.title.clone(), b.sales_index));

        Self {
            total_count: data.len(),
            mean_price: mean(data.books.iter().map(|b| b.sale_price)),
            mean_sales_index: mean(data.books.iter().map(|b| b.sales_index)),
            top_publisher,
            top_seller,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "총 도서 수: {}", self.total_count)?;
        match self.mean_price {
            Some(v) => writeln!(f, "평균 판매가: {v:.0}원")?,
            None => writeln!(f, "평균 판매가: -")?,
        }
        match self.mean_sales_index {
            Some(v) => writeln!(f, "평균 판매지수: {v:.1}")?,
            None => writeln!(f, "평균 판매지수: -")?,
        }
        match &self.top_publisher {
            Some((name, count)) => writeln!(f, "최다 출판사: {name} ({count}권)")?,
            None => writeln!(f, "최다 출판사: -")?,
        }
        match &self.top_seller {
            Some((title, index)) => write!(f, "최고 판매지수: {title} ({index:.0})"),
            None => write!(f, "최고 판매지수: -"),
        }
    }
}

/// Arithmetic mean, `None` for an empty input.
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Occurrence counts, most frequent first. Ties keep first-seen order and
/// blank values are not counted.
pub fn count_by<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values.map(str::trim).filter(|v| !v.is_empty()) {
        if let Some(&idx) = positions.get(value) {
            counts[idx].1 += 1;
        } else {
            positions.insert(value, counts.len());
            counts.push((value.to_owned(), 1));
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// The `n` books with the highest sales index; ties keep input order.
#[must_use]
pub fn top_n_by_sales(books: &[Book], n: usize) -> Vec<&Book> {
    let mut ranked: Vec<&Book> = books.iter().collect();
    ranked.sort_by(|a, b| b.sales_index.total_cmp(&a.sales_index));
    ranked.truncate(n);
    ranked
}
