//! Diesel table definitions mirroring `backend/migrations`.

diesel::table! {
    contacts (id) {
        id -> Uuid,
        first_name -> Text,
        last_name -> Text,
        email -> Text,
        phone_number -> Text,
        company -> Nullable<Text>,
        job_title -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
