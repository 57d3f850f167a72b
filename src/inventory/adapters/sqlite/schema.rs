//! Diesel schema for inventory persistence.

diesel::table! {
    /// Units held per service kit.
    inventory (item) {
        /// Kit display name.
        item -> Text,
        /// Units held, never negative.
        quantity -> BigInt,
    }
}
