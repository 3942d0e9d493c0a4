use std::ops::Bound;
use std::ops::RangeBounds;

pub trait NewRand<T> {
    fn new_rand(range: impl RangeBounds<f32> + Clone) -> T;
}

impl NewRand<f32> for f32 {
    fn new_rand(range: impl RangeBounds<f32> + Clone) -> f32 {
        let from = match range.start_bound() {
            Bound::Included(v) | Bound::Excluded(v) => *v,
            Bound::Unbounded => f32::MIN,
        };

        let to = match range.end_bound() {
            Bound::Included(v) | Bound::Excluded(v) => *v,
            Bound::Unbounded => f32::MAX,
        };

        fastrand::f32() * (to - from) + from
    }
}
