use crate::sorts::{lexicographic_sort, lsd_sort, msd_sort};
use crate::tracer::{LogTracer, NoopTracer, Tracer};
use crate::utils::validate_keys;
use crate::{DecimalKey, SortError};

pub struct DecimalSortBuilder<'a, T> {
    data: &'a mut [T],
    tracer: &'a dyn Tracer<T>,
}

impl<'a, T> DecimalSortBuilder<'a, T>
where
    T: DecimalKey,
{
    pub(crate) fn new(data: &'a mut [T]) -> Self {
        Self {
            data,
            tracer: &NoopTracer,
        }
    }

    /// Report passes and partitions through the `log` facade at debug level.
    pub fn with_log_tracer(mut self) -> Self {
        self.tracer = &LogTracer;

        self
    }

    pub fn with_tracer(mut self, tracer: &'a dyn Tracer<T>) -> Self {
        self.tracer = tracer;

        self
    }

    /// Sorts in place, least-significant digit first.
    pub fn lsd(self) -> Result<(), SortError> {
        validate_keys(self.data)?;
        lsd_sort(self.data, self.tracer);

        Ok(())
    }

    /// Sorts in place into numeric order, most-significant digit first.
    pub fn msd(self) -> Result<(), SortError> {
        validate_keys(self.data)?;
        msd_sort(self.data, self.tracer);

        Ok(())
    }

    /// Returns the keys ordered by their decimal strings. The data is not modified.
    pub fn lexicographic(self) -> Result<Vec<T>, SortError> {
        validate_keys(self.data)?;

        Ok(lexicographic_sort(self.data, self.tracer))
    }
}
