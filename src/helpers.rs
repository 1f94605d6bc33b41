/*
 * Helpers shared between the solutions and the router.
 * Example import from this file: `use crucible::helpers::parse;`.
 */

pub mod parse;
