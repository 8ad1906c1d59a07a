use contracts::domain::a003_voucher::VoucherDto;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct VoucherListState {
    /// Открытая форма создания/редактирования
    pub editing: Option<VoucherDto>,
    pub form_error: Option<String>,
}

pub fn create_state() -> RwSignal<VoucherListState> {
    RwSignal::new(VoucherListState::default())
}
