//! Diesel schema for fleet persistence.

diesel::table! {
    /// Fleet vehicles.
    vehicles (vehicle_id) {
        /// User-assigned vehicle key.
        vehicle_id -> Text,
        /// Manufacturer.
        make -> Text,
        /// Model name.
        model -> Text,
        /// Model year.
        year -> Integer,
        /// Status display string.
        status -> Text,
    }
}

diesel::table! {
    /// Maintenance jobs per vehicle.
    maintenance (id) {
        /// Auto-incrementing row identifier.
        id -> BigInt,
        /// Referenced vehicle key (not enforced).
        vehicle_id -> Text,
        /// Scheduled date as entered.
        date -> Text,
        /// Job description.
        description -> Text,
        /// Completion flag stored as 0/1.
        completed -> Bool,
    }
}

diesel::table! {
    /// Scheduled customer calls.
    call_schedules (call_id) {
        /// User-assigned call key.
        call_id -> Text,
        /// Customer name.
        customer_name -> Text,
        /// Call date as entered.
        date -> Text,
        /// Call time as entered.
        time -> Text,
        /// Optional job type display string.
        job_type -> Nullable<Text>,
        /// Assigned vehicle key, if any.
        vehicle_id -> Nullable<Text>,
    }
}
