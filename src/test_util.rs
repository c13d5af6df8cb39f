use std::fmt::Debug;

/// Run one pipeline stage over a case-table input and compare the output.
///
/// `expect` may be a borrowed form of the output, so tables can list
/// `Vec<&str>` for stages that return `Vec<String>`.
pub fn assert_stage<F, I, T, E>(stage: F, input: I, expect: E)
where
    F: FnOnce(I) -> T,
    I: Debug + Clone,
    T: PartialEq<E> + Debug,
    E: Debug,
{
    let output = stage(input.clone());
    assert!(
        output == expect,
        "stage output for {:?}\r\n  got:      {:?}\r\n  expected: {:?}",
        input, output, expect
    );
}
