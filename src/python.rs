//! src/python.rs
//!
//! Python-bindings (feature `python`). Het batch-script roept deze functies per
//! instantiebestand aan; parallellisme over bestanden gebeurt aan Python-kant.

use crate::{feasibility::check_solution, grasp::solve_runs, Instance, Params};
use pyo3::prelude::*;
use std::fs::File;
use std::io::{self, BufReader};

/// Python-zicht op `Params`.
#[pyclass(name = "Params")]
#[derive(Clone, Debug)]
pub struct PyParams {
    #[pyo3(get, set)]
    pub max_iterations: usize,
    #[pyo3(get, set)]
    pub alpha: f64,
    #[pyo3(get, set)]
    pub runs: usize,
    #[pyo3(get, set)]
    pub seed: u64,
}

#[pymethods]
impl PyParams {
    #[new]
    #[pyo3(signature = (max_iterations = 50, alpha = 0.8, runs = 1, seed = 42))]
    pub fn new(max_iterations: usize, alpha: f64, runs: usize, seed: u64) -> Self {
        Self {
            max_iterations,
            alpha,
            runs,
            seed,
        }
    }

    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl From<&PyParams> for Params {
    fn from(p: &PyParams) -> Self {
        Params::new(p.max_iterations, p.alpha, p.runs, p.seed)
    }
}

/// Leest een DAT-bestand; IO-fouten worden `IOError`, formaatfouten `ValueError`.
fn load_instance(instance_path: &str) -> PyResult<Instance> {
    let file = File::open(instance_path)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyIOError, _>(e.to_string()))?;
    Instance::parse_dat(BufReader::new(file)).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()),
        _ => PyErr::new::<pyo3::exceptions::PyIOError, _>(e.to_string()),
    })
}

/// Python-binding voor de GRASP-oplosser.
/// Geeft `(status, objective, time, selected_items)` terug.
#[pyfunction]
#[pyo3(signature = (instance_path, py_params))]
fn solve_grasp_py(
    py: Python<'_>,
    instance_path: String,
    py_params: Py<PyParams>,
) -> PyResult<(String, u64, f64, Vec<usize>)> {
    let instance = load_instance(&instance_path)?;
    let p = Params::from(&*py_params.borrow(py));

    let res = py.allow_threads(|| solve_runs(&instance, &p));
    Ok((
        res.status.as_str().to_string(),
        res.objective,
        res.time,
        res.selected_items,
    ))
}

/// Controleert een (extern aangeleverde) selectie. Geeft `(valid, reason)` terug.
#[pyfunction]
fn check_solution_py(instance_path: String, selected_items: Vec<usize>) -> PyResult<(bool, String)> {
    let instance = load_instance(&instance_path)?;
    let verdict = check_solution(&instance, &selected_items);
    Ok((verdict.is_valid(), verdict.as_str().to_string()))
}

/// Helperfunctie om een DAT-bestand te parsen en (n, m, capacity) terug te geven.
#[pyfunction]
fn parse_dat_py(instance_path: String) -> PyResult<(usize, usize, u64)> {
    let instance = load_instance(&instance_path)?;
    Ok((instance.n(), instance.m(), instance.capacity()))
}

/// Definieert de Python-module `_native`.
#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyParams>()?;
    m.add_function(wrap_pyfunction!(solve_grasp_py, m)?)?;
    m.add_function(wrap_pyfunction!(check_solution_py, m)?)?;
    m.add_function(wrap_pyfunction!(parse_dat_py, m)?)?;
    Ok(())
}
