/// Iterator adapter flagging the start of each run of consecutive items
/// sharing a grouping key.
///
/// Correctness depends on the input already being sorted by the key (the
/// server orders features per the request descriptor); no re-ordering or
/// bucketing happens here, only an adjacent comparison against the previous
/// item's key.
pub struct Runs<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    iter: I,
    key: F,
    previous: Option<K>,
}

impl<I, F, K> Iterator for Runs<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    /// `(true, item)` when the item opens a new run.
    type Item = (bool, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let key = (self.key)(&item);
        let fresh = self.previous.as_ref() != Some(&key);
        self.previous = Some(key);
        Some((fresh, item))
    }
}

pub fn runs_by<I, F, K>(items: I, key: F) -> Runs<I::IntoIter, F, K>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    Runs {
        iter: items.into_iter(),
        key,
        previous: None,
    }
}
