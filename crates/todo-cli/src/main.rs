use std::sync::Arc;

use todo_core::ports::TodoStore;
use todo_core::store::InMemoryStore;

#[tokio::main]
async fn main() {
    // (A) one store instance, shared by handle (no global state)
    let store = Arc::new(InMemoryStore::new());

    // (B) a few concurrent writers
    let mut writers = Vec::new();
    for name in ["alice", "bob"] {
        let store = store.clone();
        writers.push(tokio::spawn(async move {
            for n in 1..=3 {
                let id = store.add(format!("{name}: errand #{n}")).await;
                println!("added: id={id}");
            }
        }));
    }
    for writer in writers {
        writer.await.expect("writer task panicked");
    }

    // (C) complete the first entry, delete the last
    let todos = store.list().await;
    let first = todos.first().expect("store is not empty").id;
    let last = todos.last().expect("store is not empty").id;
    store.complete(first).await.expect("first id is present");
    store.delete(last).await.expect("last id is present");

    // (D) print the wire shape the way an HTTP layer would
    let todos = store.list().await;
    println!(
        "{}",
        serde_json::to_string_pretty(&todos).expect("todos serialize")
    );
    println!("counts: {:?}", store.counts().await);

    // (E) a miss surfaces NotFound for the caller to map (e.g. to a 404)
    match store.delete(last).await {
        Ok(()) => unreachable!("already deleted"),
        Err(e) => println!("delete again: {e}"),
    }
}
