/// Asserts that evaluating `$run` panics, which is how out of bounds cursor accesses surface.
/// The block may borrow stores freely; unwind safety is asserted on its behalf.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "expected an out of bounds panic")
    };
    ($run:block, $msg:literal) => {
        let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run));
        assert!(caught.is_err(), $msg);
        println!("^ panic caught");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
