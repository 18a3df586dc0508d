use yew::prelude::*;

use crate::store::StoreContext;

/// The app store provided by the nearest `ContextProvider<StoreContext>`.
#[hook]
pub fn use_store() -> Option<StoreContext> {
    use_context::<StoreContext>()
}
