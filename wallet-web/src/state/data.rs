//! Data provider context

use std::rc::Rc;

use leptos::prelude::*;
use lib_core::data::{EcoDataProvider, StaticDataProvider};

#[derive(Clone, Copy)]
pub struct DataContext {
    provider: StoredValue<Rc<dyn EcoDataProvider>, LocalStorage>,
}

impl DataContext {
    pub fn provider(&self) -> Rc<dyn EcoDataProvider> {
        self.provider.get_value()
    }
}

pub fn provide_data_context() -> DataContext {
    let provider: Rc<dyn EcoDataProvider> = Rc::new(StaticDataProvider::new());
    let context = DataContext {
        provider: StoredValue::new_local(provider),
    };
    provide_context(context);
    context
}

pub fn use_data_context() -> DataContext {
    expect_context::<DataContext>()
}
