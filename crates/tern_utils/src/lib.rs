pub mod peek;

/// Snapshot the debug output of `$output`, attaching `$source` as the
/// snapshot info so failures show the input that produced them.
///
/// The calling crate must depend on `insta`.
#[macro_export]
macro_rules! assert_debug_snapshot_with_source {
    ($source:expr => $output:expr, @$snapshot:literal) => {{
        insta::with_settings!({
            info => &$source,
            omit_expression => true,
        }, {
            insta::assert_debug_snapshot!($output, @$snapshot);
        })
    }};
}
