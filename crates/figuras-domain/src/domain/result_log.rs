/// Results of successful computations, in the order they were produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultLog {
    values: Vec<f64>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}

impl From<ResultLog> for Vec<f64> {
    fn from(log: ResultLog) -> Self {
        log.values
    }
}
