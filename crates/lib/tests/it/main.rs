/*! Integration tests for resource-struct.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * Modules:
 * - strict: Strict immutable structs (missing fields are errors)
 * - flex: Lenient mutable structs, assignment and arity enforcement
 * - loose: Lenient immutable structs that ignore arguments
 * - equality: Key-kind independent equality
 * - path: Chained lookups through nested structs and lists
 * - serialization: JSON, the variant seed, dumps and binary encoding
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("resource_struct=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod equality;
mod path;
mod strict;
