// fixtures/courses.rs
//
// Sample catalog used by tests and the in-memory course source.

#![allow(async_fn_in_trait)]

use std::sync::Mutex;

use crate::web_app::api::{CatalogError, CourseQuery, CourseSource};
use crate::web_app::model::{Category, Course, SortKey};

const IMAGE: &str = "/templates/img/IT1.jpeg";

// (name, description, price, category, customers)
const COURSES: &[(&str, &str, i64, Category, i64)] = &[
    ("Python с нуля", "Основы языка и синтаксиса", 22000, Category::Programming, 85),
    ("React для начинающих", "Создание SPA приложений", 25000, Category::Programming, 73),
    ("FastAPI продвинутый курс", "Создание backend сервисов", 31000, Category::Programming, 54),
    ("Основы TypeScript", "Типизация JavaScript приложений", 24000, Category::Programming, 68),
    ("Node.js и Express", "Создание серверов и API", 27000, Category::Programming, 61),
    ("Django REST Framework", "Backend на Python", 30000, Category::Programming, 72),
    ("HTML и CSS с нуля", "Верстка и адаптивный дизайн", 18000, Category::Programming, 112),
    ("Git и командная разработка", "Работа с ветками и репозиториями", 11000, Category::Programming, 140),
    ("Java для начинающих", "ООП и базовые конструкции", 26000, Category::Programming, 77),
    ("Python OOP на практике", "Классы, наследование, паттерны", 25000, Category::Programming, 63),
    ("Асинхронный Python", "asyncio, aiohttp, uvicorn", 30000, Category::Programming, 52),
    ("Fullstack на React и FastAPI", "Frontend + Backend связка", 38000, Category::Programming, 48),
    ("Kotlin для Android", "Создание мобильных приложений", 29000, Category::Programming, 58),
    ("SQL для аналитиков", "Запросы, агрегаты и соединения", 19000, Category::DataAnalytics, 92),
    ("Power BI — визуализация данных", "Дашборды и отчёты", 23000, Category::DataAnalytics, 78),
    ("Python для анализа данных", "Pandas, NumPy, графики", 24000, Category::DataAnalytics, 88),
    ("A/B-тестирование", "Метрики и статистика", 21000, Category::DataAnalytics, 66),
    ("Excel — продвинутый уровень", "Формулы и анализ данных", 17000, Category::DataAnalytics, 105),
    ("Machine Learning базовый", "Классификация и регрессия", 34000, Category::DataAnalytics, 52),
    ("Продуктовая аналитика", "Метрики и когортный анализ", 30000, Category::DataAnalytics, 58),
    ("Airflow и оркестрация данных", "Построение пайплайнов", 36000, Category::DataAnalytics, 37),
    ("Data Science старт", "Основы анализа и моделей", 33000, Category::DataAnalytics, 51),
    ("UX/UI дизайн с нуля", "Основы интерфейсов и прототипы", 26000, Category::Design, 81),
    ("Figma для начинающих", "Макеты и компоненты", 20000, Category::Design, 122),
    ("Motion-дизайн", "Анимации и графические эффекты", 30000, Category::Design, 47),
    ("3D-моделирование в Blender", "Создание объектов и сцен", 27000, Category::Design, 58),
    ("Иконки и иллюстрации", "Цифровая графика", 16000, Category::Design, 84),
    ("Дизайн презентаций", "Визуальные коммуникации", 15000, Category::Design, 91),
    ("Типографика в дизайне", "Работа со шрифтами", 17000, Category::Design, 66),
    ("Бесплатный вводный урок", "Знакомство с платформой", 0, Category::Design, 310),
];

/// The sample catalog, ids assigned from 1 in table order.
pub fn sample_courses() -> Vec<Course> {
    COURSES
        .iter()
        .enumerate()
        .map(|(i, (name, description, price, category, customers))| Course {
            id: i as i64 + 1,
            name: (*name).to_string(),
            description: (*description).to_string(),
            image_url: IMAGE.to_string(),
            category: category.label().to_string(),
            price: *price,
            customer_count: *customers,
        })
        .collect()
}

/// Applies a listing query to `courses` as an idealised course service
/// would: every parameter, price bounds included, is honoured.
pub fn apply_query(courses: &[Course], query: &CourseQuery) -> Vec<Course> {
    let needle = query
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    let mut matched: Vec<Course> = courses
        .iter()
        .filter(|c| match &needle {
            Some(needle) => c.name.trim().to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .filter(|c| query.category.map_or(true, |cat| c.category == cat.label()))
        .filter(|c| query.min_price.map_or(true, |min| c.price >= min))
        .filter(|c| query.max_price.map_or(true, |max| c.price <= max))
        .cloned()
        .collect();

    match query.sort {
        Some(SortKey::PriceAsc) => matched.sort_by_key(|c| c.price),
        Some(SortKey::PriceDesc) => matched.sort_by_key(|c| std::cmp::Reverse(c.price)),
        Some(SortKey::Popularity) => matched.sort_by_key(|c| std::cmp::Reverse(c.customer_count)),
        None => {}
    }

    matched
        .into_iter()
        .skip(query.offset())
        .take(query.limit as usize)
        .collect()
}

/// Course source answering from memory, recording every query it sees
#[derive(Debug, Default)]
pub struct InMemoryCourseSource {
    courses: Vec<Course>,
    requests: Mutex<Vec<CourseQuery>>,
}

impl InMemoryCourseSource {
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queries received so far, oldest first.
    pub fn requests(&self) -> Vec<CourseQuery> {
        match self.requests.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn last_request(&self) -> Option<CourseQuery> {
        self.requests().pop()
    }
}

impl CourseSource for InMemoryCourseSource {
    async fn fetch_courses(&self, query: &CourseQuery) -> Result<Vec<Course>, CatalogError> {
        match self.requests.lock() {
            Ok(mut guard) => guard.push(query.clone()),
            Err(poisoned) => poisoned.into_inner().push(query.clone()),
        }
        Ok(apply_query(&self.courses, query))
    }
}
