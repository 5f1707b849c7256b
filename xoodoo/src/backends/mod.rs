use cfg_if::cfg_if;

#[cfg_attr(all(feature = "simd", not(test)), allow(dead_code))]
pub(crate) mod soft;

cfg_if! {
    if #[cfg(feature = "simd")] {
        pub(crate) mod simd;
        pub(crate) use simd::permutation;
    } else {
        pub(crate) use soft::permutation;
    }
}
