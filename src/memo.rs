//! Memoization primitives behind the selector graph.
//!
//! A [`Memo`] remembers the inputs it was last evaluated with and the value it
//! produced. Inputs are compared with [`SameRef`]: shared records by pointer,
//! scalars by value. Holding on to the previous inputs keeps the compared
//! `Arc`s alive, so a pointer match can never come from a recycled allocation.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use crate::data_types::{ChartType, InstanceId};

/// Identity comparison used to decide whether a memoized value is stale.
pub trait SameRef {
    fn same_ref(&self, other: &Self) -> bool;
}

impl<T: ?Sized> SameRef for Arc<T> {
    fn same_ref(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: SameRef> SameRef for Option<T> {
    fn same_ref(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same_ref(b),
            (None, None) => true,
            _ => false,
        }
    }
}

macro_rules! same_ref_by_value {
    ($($t:ty),*) => {
        $(
            impl SameRef for $t {
                fn same_ref(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

same_ref_by_value!(f64, i64, u64, usize, bool, ChartType, InstanceId);

macro_rules! same_ref_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: SameRef),+> SameRef for ($($name,)+) {
            fn same_ref(&self, other: &Self) -> bool {
                $(self.$idx.same_ref(&other.$idx))&&+
            }
        }
    };
}

same_ref_tuple!(A: 0);
same_ref_tuple!(A: 0, B: 1);
same_ref_tuple!(A: 0, B: 1, C: 2);
same_ref_tuple!(A: 0, B: 1, C: 2, D: 3);
same_ref_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);

struct Entry<I, V> {
    inputs: I,
    value: Arc<V>,
}

/// Single-slot memo: recomputes only when its inputs change identity.
pub struct Memo<I, V> {
    last: Mutex<Option<Entry<I, V>>>,
    version: Mutex<u64>,
}

impl<I: SameRef, V> Default for Memo<I, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: SameRef, V> Memo<I, V> {
    pub fn new() -> Self {
        Self {
            last: Mutex::new(None),
            version: Mutex::new(0),
        }
    }

    /// Returns the cached value if `inputs` match the previous call, otherwise
    /// evaluates `combine` and caches its result.
    pub fn get(&self, inputs: I, combine: impl FnOnce(&I) -> V) -> Arc<V> {
        if let Some(entry) = self.last.lock().as_ref() {
            if entry.inputs.same_ref(&inputs) {
                return entry.value.clone();
            }
        }

        // The lock is released while combining: combiners read other memos.
        let value = Arc::new(combine(&inputs));
        *self.last.lock() = Some(Entry {
            inputs,
            value: value.clone(),
        });
        let mut version = self.version.lock();
        *version = version.wrapping_add(1);
        value
    }

    /// Number of times the combiner has run.
    pub fn version(&self) -> u64 {
        *self.version.lock()
    }
}

/// One [`Memo`] per parameter key.
///
/// The map is never evicted. Keys are chart instances and chart types, of
/// which a page holds only a handful.
pub struct MemoFamily<K, I, V> {
    memos: Mutex<HashMap<K, Arc<Memo<I, V>>>>,
}

impl<K: Eq + Hash + Clone, I: SameRef, V> Default for MemoFamily<K, I, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, I: SameRef, V> MemoFamily<K, I, V> {
    pub fn new() -> Self {
        Self {
            memos: Mutex::new(HashMap::new()),
        }
    }

    fn memo(&self, key: &K) -> Arc<Memo<I, V>> {
        let mut memos = self.memos.lock();
        if let Some(memo) = memos.get(key) {
            return memo.clone();
        }
        let memo = Arc::new(Memo::new());
        memos.insert(key.clone(), memo.clone());
        memo
    }

    pub fn get(&self, key: &K, inputs: I, combine: impl FnOnce(&I) -> V) -> Arc<V> {
        self.memo(key).get(inputs, combine)
    }

    /// Recomputation count for `key`, 0 if it was never evaluated.
    pub fn version(&self, key: &K) -> u64 {
        self.memos.lock().get(key).map_or(0, |memo| memo.version())
    }

    pub fn len(&self) -> usize {
        self.memos.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memo_reuses_value_for_same_arc() {
        let memo: Memo<(Arc<Vec<i32>>,), i32> = Memo::new();
        let input = Arc::new(vec![1, 2, 3]);

        let a = memo.get((input.clone(),), |(v,)| v.iter().sum());
        let b = memo.get((input.clone(),), |_| unreachable!());
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(*a, 6);
        assert_eq!(memo.version(), 1);
    }

    #[test]
    fn test_memo_recomputes_for_equal_but_distinct_arc() {
        let memo: Memo<(Arc<Vec<i32>>,), i32> = Memo::new();
        let a = memo.get((Arc::new(vec![1]),), |(v,)| v[0]);
        let b = memo.get((Arc::new(vec![1]),), |(v,)| v[0]);
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(memo.version(), 2);
    }

    #[test]
    fn test_scalars_compare_by_value() {
        assert!(1.5f64.same_ref(&1.5));
        assert!(!f64::NAN.same_ref(&f64::NAN));
        assert!(Some(3i64).same_ref(&Some(3)));
        assert!(!None::<i64>.same_ref(&Some(3)));
        assert!((ChartType::Main, 2usize).same_ref(&(ChartType::Main, 2)));
    }

    #[test]
    fn test_family_memoizes_per_key() {
        let family: MemoFamily<u32, (i64,), i64> = MemoFamily::new();
        let a1 = family.get(&1, (10,), |(v,)| v * 2);
        let b1 = family.get(&2, (10,), |(v,)| v * 3);
        let a2 = family.get(&1, (10,), |_| unreachable!());
        assert!(Arc::ptr_eq(&a1, &a2));
        assert_eq!(*b1, 30);
        assert_eq!(family.len(), 2);
        assert_eq!(family.version(&1), 1);
        assert_eq!(family.version(&3), 0);
    }
}
