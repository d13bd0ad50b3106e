//! Diesel schema for board persistence.

diesel::table! {
    /// Kanban task records.
    kanban_tasks (id) {
        /// Storage-assigned task identifier.
        id -> Int8,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional long-form description; legacy rows may hold `NULL`.
        description -> Nullable<Text>,
        /// Ordered tags; legacy rows may hold `NULL`.
        tags -> Nullable<Array<Text>>,
        /// Ordered link records as a JSON array.
        links -> Nullable<Jsonb>,
        /// Workflow column, constrained to the board columns.
        #[max_length = 32]
        column_name -> Varchar,
        /// Advisory position within the column.
        position -> Int4,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}
