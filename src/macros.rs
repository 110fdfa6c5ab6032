#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        pattern: [ $($pat:expr),* $(,)? ]
        , prod: |$triple:ident| $body:block
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            pattern: vec![ $($pat as $crate::Predicate),* ],
            production: Box::new(move |$triple: &$crate::Triple| -> Option<&'static str> { $body }),
        }
    }};
}

#[macro_export]
macro_rules! nouns {
    ($one:literal, $few:literal, $many:literal) => {
        $crate::NounForms { one: $one, few: $few, many: $many }
    };
}
