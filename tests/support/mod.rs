//! Shared test doubles: a scripted transport and a scripted prompter.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::Value;

use agentops::error::ConsoleError;
use agentops::menu::Prompter;
use agentops::transport::{Method, Request, Transport};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub upload_file_name: Option<String>,
}

type RouteResult = Result<Value, (u16, String)>;

/// Transport double with canned responses keyed by method and path. Routes
/// can be replaced mid-test to simulate server state changing after a
/// mutation. Unrouted requests answer 404 so fallback paths are exercised
/// the same way a real mismatched endpoint would be.
pub struct StubTransport {
    routes: RefCell<Vec<(Method, String, RouteResult)>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self {
            routes: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn on(self, method: Method, path: &str, response: Value) -> Self {
        self.set(method, path, Ok(response));
        self
    }

    pub fn fail(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.set(method, path, Err((status, body.to_string())));
        self
    }

    /// Replace (or add) a route's response.
    pub fn set(&self, method: Method, path: &str, response: RouteResult) {
        let mut routes = self.routes.borrow_mut();
        if let Some(entry) = routes
            .iter_mut()
            .find(|(m, p, _)| *m == method && p == path)
        {
            entry.2 = response;
        } else {
            routes.push((method, path.to_string(), response));
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    /// POST and DELETE requests issued so far.
    pub fn mutation_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.method != Method::Get)
            .count()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.path == path).count()
    }
}

impl Transport for StubTransport {
    fn execute(&self, request: &Request) -> Result<Value, ConsoleError> {
        self.calls.borrow_mut().push(RecordedCall {
            method: request.method,
            path: request.path.clone(),
            query: request.query.clone(),
            body: request.body.clone(),
            upload_file_name: request.upload.as_ref().map(|u| u.file_name.clone()),
        });
        let routes = self.routes.borrow();
        match routes
            .iter()
            .find(|(m, p, _)| *m == request.method && *p == request.path)
        {
            Some((_, _, Ok(value))) => Ok(value.clone()),
            Some((_, _, Err((status, body)))) => {
                Err(ConsoleError::from_status(*status, body.clone()))
            }
            None => Err(ConsoleError::from_status(
                404,
                format!("no route for {} {}", request.method, request.path),
            )),
        }
    }
}

/// Prompter double fed from fixed scripts. Panics when a script runs dry;
/// that is a test bug, not an operator condition.
pub struct ScriptedPrompter {
    lines: RefCell<VecDeque<String>>,
    confirms: RefCell<VecDeque<bool>>,
}

impl ScriptedPrompter {
    pub fn new(lines: &[&str], confirms: &[bool]) -> Self {
        Self {
            lines: RefCell::new(lines.iter().map(|s| s.to_string()).collect()),
            confirms: RefCell::new(confirms.iter().copied().collect()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        Ok(self
            .lines
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("input script exhausted at prompt: {}", prompt)))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, ConsoleError> {
        Ok(self
            .confirms
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("confirm script exhausted at prompt: {}", prompt)))
    }
}
