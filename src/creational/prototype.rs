//! Prototype
//!
//! New objects are made by copying a prototype instead of building each one
//! from scratch. Useful when initialisation is expensive or when many similar
//! objects are produced in a loop.
//!
//! The hard part is copy depth. A copy must own every mutable field it
//! carries, otherwise changing the copy changes the prototype too. In Rust
//! that falls out of ownership: a `#[derive(Clone)]` on a struct of owned
//! values is already a deep copy. Sharing only appears when a field is
//! explicitly shared (`Rc`, `Arc`), which [`ShallowStudent`] shows together
//! with its fix.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Days, Local, NaiveDate};
use colored::Colorize;

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Student {
    pub name: String,
    pub age: u32,
    pub birth_day: Option<NaiveDate>,
}

/// Same record, but the birth date is shared behind `Rc<RefCell<_>>`.
#[derive(Debug, Clone)]
pub struct ShallowStudent {
    pub name: String,
    pub age: u32,
    pub birth_day: Rc<RefCell<NaiveDate>>,
}

impl ShallowStudent {
    /// Copy that owns a fresh birth date cell instead of sharing one.
    pub fn deep_clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            age: self.age,
            birth_day: Rc::new(RefCell::new(*self.birth_day.borrow())),
        }
    }
}

/// Stamp out `count` students from one prototype.
pub fn enroll(prototype: &Student, count: u32, first_birth_day: NaiveDate) -> Vec<Student> {
    (0..count)
        .map(|i| {
            let mut student = prototype.clone();
            student.name = format!("学生{}", i);
            student.age = 20 + i;
            student.birth_day = first_birth_day.checked_add_days(Days::new(u64::from(i)));
            student
        })
        .collect()
}

pub fn run() -> Result<()> {
    println!("{}", "=== Prototype ===".bold());
    let prototype = Student::default();
    let today = Local::now().date_naive();

    for student in enroll(&prototype, 3, today) {
        let birth_day = student
            .birth_day
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("  Student(name={}, age={}, birthDay={})", student.name, student.age, birth_day);
    }

    println!("{}", "--- Shared field hazard ---".dimmed());
    let original = ShallowStudent {
        name: "学生".to_string(),
        age: 20,
        birth_day: Rc::new(RefCell::new(today)),
    };
    let aliased = original.clone();
    let independent = original.deep_clone();
    if let Some(next_day) = today.checked_add_days(Days::new(1)) {
        *aliased.birth_day.borrow_mut() = next_day;
    }
    println!("  original after editing the clone: {}", original.birth_day.borrow());
    println!("  deep clone still holds:           {}", independent.birth_day.borrow());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_clone_owns_its_birth_day() {
        let original = Student {
            name: "学生0".to_string(),
            age: 20,
            birth_day: Some(date(2000, 1, 1)),
        };
        let mut copy = original.clone();

        assert_eq!(copy, original);
        assert!(!std::ptr::eq(&copy.birth_day, &original.birth_day));

        copy.birth_day = Some(date(2001, 2, 3));
        assert_eq!(original.birth_day, Some(date(2000, 1, 1)));
    }

    #[test]
    fn test_enroll_varies_each_copy() {
        let prototype = Student::default();
        let students = enroll(&prototype, 3, date(2020, 11, 9));

        assert_eq!(students.len(), 3);
        assert_eq!(students[0].name, "学生0");
        assert_eq!(students[2].age, 22);
        assert_eq!(students[1].birth_day, Some(date(2020, 11, 10)));
        assert_eq!(prototype, Student::default());
    }

    #[test]
    fn test_derived_clone_of_shared_field_aliases() {
        let original = ShallowStudent {
            name: "a".to_string(),
            age: 1,
            birth_day: Rc::new(RefCell::new(date(2000, 1, 1))),
        };
        let copy = original.clone();
        assert!(Rc::ptr_eq(&copy.birth_day, &original.birth_day));

        *copy.birth_day.borrow_mut() = date(1999, 12, 31);
        assert_eq!(*original.birth_day.borrow(), date(1999, 12, 31));
    }

    #[test]
    fn test_deep_clone_breaks_the_alias() {
        let original = ShallowStudent {
            name: "a".to_string(),
            age: 1,
            birth_day: Rc::new(RefCell::new(date(2000, 1, 1))),
        };
        let copy = original.deep_clone();
        assert!(!Rc::ptr_eq(&copy.birth_day, &original.birth_day));
        assert_eq!(*copy.birth_day.borrow(), *original.birth_day.borrow());

        *copy.birth_day.borrow_mut() = date(1999, 12, 31);
        assert_eq!(*original.birth_day.borrow(), date(2000, 1, 1));
    }
}
