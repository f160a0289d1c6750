pub type Sequence<T> = Vec<T>;
