use yew::prelude::*;

use crate::polling::{PollingConfigUpdate, PollingDataSource, PollingState, runtime};

/// Handle returned by `use_real_time_data`
#[derive(Clone, PartialEq)]
pub struct RealTimeHandle<T> {
    pub state: PollingState<T>,
    pub enabled: bool,
    pub refresh: Callback<()>,
    pub toggle: Callback<()>,
    pub update_config: Callback<PollingConfigUpdate>,
}

/// Binds a polling source to the component lifecycle.
///
/// `factory` builds a fresh source whenever `deps` change. The source is
/// started on mount and torn down on unmount or before it is replaced, so
/// no timer outlives the component.
#[hook]
pub fn use_real_time_data<T, D, F>(deps: D, factory: F) -> RealTimeHandle<T>
where
    T: Clone + PartialEq + 'static,
    D: PartialEq + 'static,
    F: FnOnce(&D) -> PollingDataSource<T> + 'static,
{
    let state = use_state(PollingState::<T>::default);
    let enabled = use_state(|| true);
    let source = use_mut_ref(|| None::<PollingDataSource<T>>);

    // Effect: (re)create the source when the dependencies change
    {
        let state = state.clone();
        let enabled = enabled.clone();
        let source_slot = source.clone();

        use_effect_with(deps, move |deps| {
            let source = factory(deps);
            let setter = state.setter();
            source.subscribe(move |snapshot| setter.set(snapshot.clone()));

            state.set(source.state());
            enabled.set(source.is_enabled());
            source.start();
            *source_slot.borrow_mut() = Some(source.clone());

            move || source.teardown() // Cleanup
        });
    }

    let refresh = {
        let source = source.clone();
        Callback::from(move |()| {
            if let Some(source) = source.borrow().clone() {
                runtime::spawn_local(async move {
                    source.refresh().await;
                });
            }
        })
    };

    let toggle = {
        let source = source.clone();
        let enabled = enabled.clone();
        Callback::from(move |()| {
            if let Some(source) = source.borrow().as_ref() {
                source.toggle();
                enabled.set(source.is_enabled());
            }
        })
    };

    let update_config = {
        let enabled = enabled.clone();
        Callback::from(move |update: PollingConfigUpdate| {
            if let Some(source) = source.borrow().as_ref() {
                source.update_config(update);
                enabled.set(source.is_enabled());
            }
        })
    };

    RealTimeHandle {
        state: (*state).clone(),
        enabled: *enabled,
        refresh,
        toggle,
        update_config,
    }
}
