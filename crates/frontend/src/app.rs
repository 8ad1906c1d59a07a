use leptos::prelude::*;

use crate::domain::a001_meal_plan::ui::list::MealPlanList;
use crate::domain::a002_plan_size::ui::list::PlanSizeList;
use crate::domain::a003_voucher::ui::list::VoucherList;
use crate::domain::a004_ingredient_category::ui::list::IngredientCategoryList;
use crate::layout::global_context::{AppGlobalContext, Screen};
use crate::layout::Shell;
use crate::projections::p901_best_sellers::ui::list::BestSellersList;
use crate::shared::data::mock::MockStore;
use crate::system::auth::context::{use_auth, AuthProvider};
use crate::system::pages::login::LoginPage;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(MockStore::new());

    view! {
        <AuthProvider>
            <AppGate />
        </AuthProvider>
    }
}

/// Токен-гейт: без access token показываем только страницу входа
#[component]
fn AppGate() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Runs once when the component is created
    ctx.init_url_integration();

    view! {
        <Shell>
            {move || match ctx.active.get() {
                Screen::BestSellers => view! { <BestSellersList /> }.into_any(),
                Screen::MealPlans => view! { <MealPlanList /> }.into_any(),
                Screen::PlanSizes => view! { <PlanSizeList /> }.into_any(),
                Screen::Vouchers => view! { <VoucherList /> }.into_any(),
                Screen::Categories => view! { <IngredientCategoryList /> }.into_any(),
            }}
        </Shell>
    }
}
