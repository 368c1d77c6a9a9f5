use common::model::reservation::ReservationDraft;
use yew::{Callback, Properties};

#[derive(Properties, PartialEq, Clone)]
pub struct ReservationFormProps {
    /// Invoked with the validated draft when the user confirms the entry.
    pub on_add: Callback<ReservationDraft>,
}
