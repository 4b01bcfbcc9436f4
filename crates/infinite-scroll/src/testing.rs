//! Test doubles shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::ops::RangeInclusive;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;

use crate::controller::Spawner;
use crate::error::FetchError;
use crate::product::{Dimensions, Product, ProductPage};
use crate::source::{PageRequest, PageSource};

type PageResult = Result<ProductPage, FetchError>;

pub fn make_product(id: u32) -> Product {
    Product {
        id,
        title: format!("Product {}", id),
        description: String::new(),
        category: None,
        brand: None,
        price: 10.0,
        discount_percentage: 0.0,
        rating: 4.0,
        stock: 1,
        availability_status: "In Stock".to_string(),
        thumbnail: String::new(),
        tags: Vec::new(),
        dimensions: Dimensions::default(),
        reviews: Vec::new(),
    }
}

pub fn products(ids: RangeInclusive<u32>) -> Vec<Product> {
    ids.map(make_product).collect()
}

pub fn page(ids: RangeInclusive<u32>) -> ProductPage {
    let products = products(ids);
    ProductPage {
        limit: products.len() as u32,
        products,
        ..Default::default()
    }
}

/// Answers each call with the next scripted response, in order.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    responses: Rc<RefCell<VecDeque<PageResult>>>,
    requests: Rc<RefCell<Vec<PageRequest>>>,
}

impl ScriptedSource {
    pub fn new(responses: Vec<PageResult>) -> Self {
        Self {
            responses: Rc::new(RefCell::new(responses.into())),
            requests: Rc::default(),
        }
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl PageSource for ScriptedSource {
    async fn fetch_page(&self, request: PageRequest) -> PageResult {
        self.requests.borrow_mut().push(request);
        let next = self.responses.borrow_mut().pop_front();
        next.unwrap_or_else(|| Err(FetchError::message("script exhausted")))
    }
}

/// Holds each call open until the test releases it through a oneshot.
#[derive(Default)]
pub struct GatedSource {
    gates: RefCell<VecDeque<oneshot::Receiver<PageResult>>>,
    requests: Rc<RefCell<Vec<PageRequest>>>,
}

impl GatedSource {
    /// Queue a gate for the next call; send on the returned half to resolve it.
    pub fn gate(&self) -> oneshot::Sender<PageResult> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().push_back(rx);
        tx
    }

    pub fn requests_handle(&self) -> Rc<RefCell<Vec<PageRequest>>> {
        Rc::clone(&self.requests)
    }
}

#[async_trait(?Send)]
impl PageSource for GatedSource {
    async fn fetch_page(&self, request: PageRequest) -> PageResult {
        self.requests.borrow_mut().push(request);
        let gate = self.gates.borrow_mut().pop_front();
        match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(FetchError::message("gate dropped"))),
            None => Err(FetchError::message("no gate queued")),
        }
    }
}

/// Spawner that parks futures until the test drives them.
#[derive(Clone, Default)]
pub struct TaskQueue {
    tasks: Rc<RefCell<VecDeque<LocalBoxFuture<'static, ()>>>>,
}

impl TaskQueue {
    pub fn spawner(&self) -> Spawner {
        let tasks = Rc::clone(&self.tasks);
        Rc::new(move |task: LocalBoxFuture<'static, ()>| tasks.borrow_mut().push_back(task))
    }

    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Run queued tasks to completion, including ones they spawn.
    pub async fn run_all(&self) {
        loop {
            let next = self.tasks.borrow_mut().pop_front();
            match next {
                Some(task) => task.await,
                None => break,
            }
        }
    }
}
