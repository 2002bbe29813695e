#![cfg(test)]

mod support;

mod menu {
    mod integration;
}

mod jokes {
    mod integration;
}
