use crate::style::ClassList;

pub trait ClassRecipe {
    fn class_list(&self) -> ClassList;

    fn classes(&self) -> String {
        self.class_list().join()
    }
}

pub trait Disableable: Sized {
    fn disabled(self, value: bool) -> Self;
}

#[macro_export]
macro_rules! impl_disableable {
    ($type:ty) => {
        impl $crate::contracts::Disableable for $type {
            fn disabled(self, value: bool) -> Self {
                <$type>::disabled(self, value)
            }
        }
    };
}
